//! Parameter-driven footprint wizards.
//!
//! A wizard declares its parameters, checks them, and builds a [`Footprint`]
//! from them. The geometry itself lives in [`crate::geometry`]; this module
//! only wires named parameters to it.
//!
//! # Example
//!
//! ```
//! use sfm10_footprint_mcp::wizard::{FootprintWizard, Sfm10Wizard};
//!
//! let wizard = Sfm10Wizard;
//! let mut store = wizard.parameters();
//! store.set("Pads", "vertical pads count", 5.0).unwrap();
//!
//! let footprint = wizard.build(&store).unwrap();
//! assert_eq!(footprint.pads.len(), 29);
//! assert_eq!(footprint.pads[0].designator, 1);
//! ```

pub mod footprint;
pub mod params;
pub mod sfm10;
pub mod validate;

pub use footprint::{Footprint, DEFAULT_TEXT_SIZE};
pub use params::{ParamUnit, Parameter, ParameterStore, ParameterValues};
pub use sfm10::{generate, Sfm10Params, Sfm10Wizard};
pub use validate::validate;

use crate::error::WizardError;

/// A footprint generator a host can register.
pub trait FootprintWizard {
    /// Short name shown in the host's wizard list.
    fn name(&self) -> &'static str;

    /// One-line description.
    fn description(&self) -> &'static str;

    /// Default value text placed on the footprint.
    fn value(&self) -> &'static str;

    /// Declares every parameter with its default.
    fn parameters(&self) -> ParameterStore;

    /// Checks the store without building anything.
    ///
    /// # Errors
    ///
    /// Returns the same error [`FootprintWizard::build`] would.
    fn check(&self, store: &ParameterStore) -> Result<(), WizardError> {
        self.build(store).map(|_| ())
    }

    /// Builds the footprint from the store's current values.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter is unknown or fails validation.
    fn build(&self, store: &ParameterStore) -> Result<Footprint, WizardError>;
}
