pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;
pub const MAX_SOL_DECIMALS: u32 = 9;
// Native-SOL destination accounts carry no data
pub const RENT_EXEMPT_DATA_LEN: usize = 0;

// Donation defaults
pub const DEFAULT_DESTINATION: &str = "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM";
pub const DEFAULT_AMOUNT_SOL: u64 = 1;
pub const DEFAULT_PRESET_AMOUNTS: [u64; 3] = [1, 5, 10];
pub const DEFAULT_TITLE: &str = "Actions Example - Donate Native SOL";
pub const DEFAULT_DESCRIPTION: &str = "Donate SOL";
pub const DEFAULT_LABEL: &str = "Transfer";
pub const DEFAULT_ICON: &str = "/avatar.svg";
pub const CUSTOM_AMOUNT_LABEL: &str = "Send SOL";
pub const CUSTOM_AMOUNT_PARAMETER_LABEL: &str = "Enter the amount of SOL to send";
pub const AMOUNT_PLACEHOLDER: &str = "{amount}";

// Routes
pub const DEFAULT_ACTION_PATH: &str = "/api/actions/donate";
pub const ACTIONS_JSON_PATH: &str = "/actions.json";
pub const ACTIONS_PATH_PATTERN: &str = "/api/actions/**";
pub const LIVENESS_PATH: &str = "/liveness";

// Server
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 2 * 1024 * 1024; // 2 MB
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_RPC_TIMEOUT_SECS: u64 = 90;
pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

// Action headers
pub const X_ACTION_VERSION: &str = "x-action-version";
pub const X_BLOCKCHAIN_IDS: &str = "x-blockchain-ids";
pub const X_FORWARDED_PROTO: &str = "x-forwarded-proto";
pub const ACTION_VERSION: &str = "2.4";
pub const SOLANA_MAINNET_BLOCKCHAIN_ID: &str = "solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp";
pub const CORS_ALLOW_METHODS: &str = "GET,POST,PUT,OPTIONS";
pub const CORS_ALLOW_HEADERS: &str = "Content-Type, Authorization, Content-Encoding, \
Accept-Encoding, X-Accept-Action-Version, X-Accept-Blockchain-Ids";
pub const CORS_EXPOSE_HEADERS: &str = "X-Action-Version, X-Blockchain-Ids";
