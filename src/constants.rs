/// Review level assigned to every newly created account
pub const DEFAULT_REVIEW_LEVEL: i64 = 0;

/// Upper bound on pooled SQLite connections for file-backed databases
pub const MAX_DB_CONNECTIONS: u32 = 5;

// =============================================================================
// Error Messages
// =============================================================================

/// Login failure, identical for unknown users and wrong passwords
pub const ERR_INVALID_CREDENTIALS: &str = "Invalid username or password";

pub const ERR_MISSING_CREDENTIALS: &str = "Missing username or password";

pub const ERR_USERNAME_TAKEN: &str = "Username already exists";

pub const ERR_INVALID_BUDGET: &str = "Invalid budget parameter";

pub const ERR_MISSING_SAVE_FIELDS: &str = "Missing username or vehicleID";

pub const ERR_CAR_ALREADY_SAVED: &str = "Car is already saved.";

pub const ERR_SAVED_CAR_NOT_FOUND: &str = "Car not found in saved list";

pub const ERR_MISSING_USERNAME: &str = "Missing username in request";

pub const ERR_MISSING_PREFERENCE_FIELDS: &str =
    "Missing username, vehicleID, or likesOrDislikes";

pub const ERR_INVALID_PREFERENCE: &str =
    "Invalid value for likesOrDislikes. Use \"likes\" or \"dislikes\".";

/// Generic message for storage failures that expose no driver detail
pub const ERR_DATABASE: &str = "Database error";

pub const ERR_VEHICLE_QUERY: &str = "Database query failed";

pub const ERR_REMOVE_SAVED_CAR: &str = "Failed to remove car";

pub const ERR_LIST_SAVED_CARS: &str = "Failed to retrieve saved cars";

pub const ERR_UPDATE_PREFERENCE: &str = "Failed to update preference";

pub const ERR_LIST_PREFERENCES: &str = "Failed to retrieve preferences";
