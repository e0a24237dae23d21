//! Well-known names used throughout the lola codebase.
//!
//! This module contains the fixed file and directory names that make up
//! the on-disk contract of the tool. Defining them centrally improves
//! maintainability and makes magic strings more discoverable.

/// Manifest filename looked up inside the modules directory.
pub const LOLAMOD_FILE: &str = "lolamod.yml";

/// Hidden directory created under the destination to hold installed assets.
///
/// Assets land in `<dest>/.lolas/<module_name>/<asset>` so repeated installs
/// of different modules never collide at the destination's top level.
pub const LOLAS_DIR: &str = ".lolas";

/// Extension appended to main-file backups.
pub const BACKUP_EXTENSION: &str = "bkp";

/// Date format stamped into backup filenames (`config-20260805.bkp`).
///
/// Day granularity only: a second install on the same day overwrites the
/// earlier backup.
pub const BACKUP_DATE_FORMAT: &str = "%Y%m%d";

/// Modules directory used when `-p/--path` is not given.
pub const DEFAULT_MODULES_DIR: &str = "./modules";
