// Canonical event signature. Emitted by every ERC-20 token, so bindings
// for it carry no address constraint.
pub const TRANSFER_EVENT_SIGNATURE: &str = "Transfer(address,address,uint256)";
