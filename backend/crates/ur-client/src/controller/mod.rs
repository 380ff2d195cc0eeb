pub(crate) mod error;
pub(crate) mod input;
pub(crate) mod list_controller;
pub(crate) mod view;

pub use error::{ControllerError, Result as ControllerResult};
pub use input::{InputField, Key};
pub use list_controller::{ControllerState, ListController, SubmitOutcome};
pub use view::{ListView, UserRow};
