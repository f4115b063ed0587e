//! Local persistence for the pair list between CLI runs.
//!
//! One JSON file under the home directory plays the role the open page
//! played for the browser: keeping the assembled pairs and the default
//! language selections alive between bursts of user actions.

mod session_file;

pub use session_file::{SessionStore, StoreError, StoredSession};
