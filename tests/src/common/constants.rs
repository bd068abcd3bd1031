/// Lamports the mock node reports as the rent-exempt minimum for a 0-byte account
pub const RENT_EXEMPT_MINIMUM_LAMPORTS: u64 = 890_880;

/// Any URL other than this one gets the SDK's canned mock responses
pub const FAILING_RPC_URL: &str = "fails";
pub const MOCK_RPC_URL: &str = "http://localhost:8899";

pub const DESTINATION: &str = "11111111111111111111111111111112";
