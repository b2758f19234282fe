mod response;
pub use response::{Response, Rows, WriteOutcome, Written};

pub mod operation;
pub use operation::Operation;

use crate::{schema::ModelId, Result, Schema};

use std::fmt::Debug;

pub trait Driver: Debug + Send + Sync + 'static {
    /// Execute a store operation
    fn exec(&self, schema: &Schema, op: Operation) -> Result<Response>;

    /// Provision the persistent views declared on the model's family.
    fn create_model_storage(&self, schema: &Schema, model: ModelId) -> Result<()>;

    /// Remove the persistent views provisioned for the model's family. Views
    /// that are already gone are not an error.
    fn destroy_model_storage(&self, schema: &Schema, model: ModelId) -> Result<()>;
}
