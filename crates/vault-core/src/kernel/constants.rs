/// Application name, also the owner name of Vault's own registrations
pub const APP_NAME: &str = "Vault";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// GitHub API endpoint describing the latest release
pub const RELEASES_API_URL: &str = "https://api.github.com/repos/Foulest/Vault/releases/latest";

/// Page operators are sent to when an update is available
pub const DOWNLOAD_URL: &str = "https://github.com/Foulest/Vault/releases/latest";

/// Sent to a command sender lacking the node for a sub-command
pub const NO_PERMISSION: &str = "&cNo permission.";

/// Suffix appended to a provider name when transient permissions need an online player
pub const NO_TRANSIENT_PERMISSIONS: &str = " does not support offline player transient permissions.";

/// Suffix appended to a provider name when it has no group model
pub const NO_GROUP_PERMISSIONS: &str = " has no group permissions.";

/// Suffix appended to a provider name when it has no bank model
pub const NO_BANK_SUPPORT: &str = " does not support bank accounts.";

/// Command permission nodes
pub const PERM_MAIN: &str = "vault.main";
pub const PERM_INFO: &str = "vault.info";
pub const PERM_CONVERT: &str = "vault.convert";

/// Help entries shown per page
pub const HELP_ITEMS_PER_PAGE: usize = 4;
