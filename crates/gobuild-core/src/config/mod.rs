//! Build configuration resolution
//!
//! Configuration for a build comes from three places, applied in order:
//!
//! 1. **Project file** - `buildpack.yml` in the project root, when present
//! 2. **Environment** - `BP_GO_*` overrides, each replacing the file value
//!    only when the variable is set
//! 3. **Filesystem** - default targets and the `go.mod` marker
//!
//! # Environment Variables
//!
//! | Variable                  | Effect                                          |
//! |---------------------------|-------------------------------------------------|
//! | `BP_GO_TARGETS`           | Replaces the target list (path-list separated)  |
//! | `BP_GO_BUILD_FLAGS`       | Replaces the whole flag list (shell syntax)     |
//! | `BP_GO_BUILD_LDFLAGS`     | Replaces or appends the single `-ldflags` flag  |
//! | `BP_GO_BUILD_IMPORT_PATH` | Replaces the import path                        |
//! | `BP_DISABLE_MODULE_BOM`   | `true` skips module BOM generation              |

mod buildpack_yml;
mod flags;
mod resolver;
pub mod shellwords;
mod types;

pub use buildpack_yml::{BUILDPACK_YML, BuildpackYmlReader};
pub use flags::{BUILD_FLAGS_ENV, LDFLAGS_ENV, LDFLAGS_PREFIX, merge_flags};
pub use resolver::{
    ConfigSourceReader, ConfigurationParser, ConfigurationResolver, DISABLE_MODULE_BOM_ENV,
    GO_MOD, IMPORT_PATH_ENV, PATH_LIST_SEPARATOR, TARGETS_ENV, parse_bool, split_path_list,
};
pub use types::{BuildConfiguration, PartialConfiguration};
