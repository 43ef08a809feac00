//! SFM10 footprint wizard.
//!
//! The SFM10 is a rectangular module with a single row of pads on each of its
//! short edges and one column of pads along its right-hand long edge. The
//! silkscreen follows the body outline and is gapped around every pad.

use tracing::debug;

use crate::error::{ValidationError, WizardError};
use crate::geometry::{Body, OutlineBuilder, PadParams};
use crate::wizard::footprint::Footprint;
use crate::wizard::params::ParameterStore;
use crate::wizard::validate::validate;
use crate::wizard::FootprintWizard;

/// Parameter categories and names, as shown to the user.
pub mod keys {
    /// Pad layout category.
    pub const PADS: &str = "Pads";
    /// Body outline category.
    pub const BODY: &str = "Body";

    /// Pads in the right column.
    pub const VERTICAL_COUNT: &str = "vertical pads count";
    /// Pads in the top and bottom rows together.
    pub const HORIZONTAL_COUNT: &str = "horizontal pads count";
    /// Pad width.
    pub const PAD_WIDTH: &str = "pad width";
    /// Pad length.
    pub const PAD_LENGTH: &str = "pad length";
    /// Pad pitch.
    pub const PAD_PITCH: &str = "pad pitch";
    /// Hand-solder pad extension.
    pub const HANDSOLDER_MARGIN: &str = "hand solder margin";
    /// Distance between top and bottom row centres.
    pub const HORIZONTAL_ROW_SPACING: &str = "horizontal row spacing";
    /// Distance from the centre to the right column.
    pub const VERTICAL_ROW_SPACING: &str = "vertical row spacing from center";

    /// Body width (Y).
    pub const BODY_WIDTH: &str = "width";
    /// Body horizontal offset.
    pub const HORIZONTAL_OFFSET: &str = "horizontal body offset";
    /// Body length (X).
    pub const BODY_LENGTH: &str = "length";
    /// Courtyard X margin.
    pub const X_MARGIN: &str = "x margin";
    /// Courtyard Y margin.
    pub const Y_MARGIN: &str = "y margin";
    /// Silkscreen-to-pad clearance.
    pub const CLEARANCE: &str = "pad clearance";
    /// Shortest silkscreen segment drawn.
    pub const MIN_SEGMENT_LENGTH: &str = "segment min length";
}

/// Footprint name.
pub const NAME: &str = "SFM10";

/// Resolved SFM10 parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sfm10Params {
    /// Pad layout.
    pub pads: PadParams,
    /// Body outline.
    pub body: Body,
}

impl Default for Sfm10Params {
    fn default() -> Self {
        Self {
            pads: PadParams {
                vertical_count: 7,
                horizontal_count: 24,
                pad_width: 0.7,
                pad_length: 1.0,
                pitch: 1.1,
                handsolder_margin: 0.0,
                horizontal_row_spacing: 11.72,
                vertical_row_spacing: 6.86,
            },
            body: Body {
                width: 13.0,
                length: 15.0,
                horizontal_offset: 0.0,
                x_margin: 0.1,
                y_margin: 0.1,
                clearance: 0.2,
                min_segment_length: 0.2,
            },
        }
    }
}

impl Sfm10Params {
    /// Declares every SFM10 parameter with its default.
    #[must_use]
    pub fn parameter_store() -> ParameterStore {
        use self::keys::{BODY, PADS};
        use crate::wizard::params::ParamUnit::{Millimetres, Natural};

        let d = Self::default();
        let mut store = ParameterStore::new();

        store.add(PADS, keys::VERTICAL_COUNT, Natural, f64::from(d.pads.vertical_count));
        store.add(PADS, keys::HORIZONTAL_COUNT, Natural, f64::from(d.pads.horizontal_count));
        store.add(PADS, keys::PAD_WIDTH, Millimetres, d.pads.pad_width);
        store.add(PADS, keys::PAD_LENGTH, Millimetres, d.pads.pad_length);
        store.add(PADS, keys::PAD_PITCH, Millimetres, d.pads.pitch);
        store.add(PADS, keys::HANDSOLDER_MARGIN, Millimetres, d.pads.handsolder_margin);
        store.add(PADS, keys::HORIZONTAL_ROW_SPACING, Millimetres, d.pads.horizontal_row_spacing);
        store.add(PADS, keys::VERTICAL_ROW_SPACING, Millimetres, d.pads.vertical_row_spacing);

        store.add(BODY, keys::BODY_WIDTH, Millimetres, d.body.width);
        store.add(BODY, keys::HORIZONTAL_OFFSET, Millimetres, d.body.horizontal_offset);
        store.add(BODY, keys::BODY_LENGTH, Millimetres, d.body.length);
        store.add(BODY, keys::X_MARGIN, Millimetres, d.body.x_margin);
        store.add(BODY, keys::Y_MARGIN, Millimetres, d.body.y_margin);
        store.add(BODY, keys::CLEARANCE, Millimetres, d.body.clearance);
        store.add(BODY, keys::MIN_SEGMENT_LENGTH, Millimetres, d.body.min_segment_length);

        store
    }

    /// Reads the current values out of a store.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter is missing or a count is not a
    /// non-negative integer. Range checks are left to [`validate`].
    pub fn from_store(store: &ParameterStore) -> Result<Self, WizardError> {
        use self::keys::{BODY, PADS};

        Ok(Self {
            pads: PadParams {
                vertical_count: store.natural(PADS, keys::VERTICAL_COUNT)?,
                horizontal_count: store.natural(PADS, keys::HORIZONTAL_COUNT)?,
                pad_width: store.require(PADS, keys::PAD_WIDTH)?,
                pad_length: store.require(PADS, keys::PAD_LENGTH)?,
                pitch: store.require(PADS, keys::PAD_PITCH)?,
                handsolder_margin: store.require(PADS, keys::HANDSOLDER_MARGIN)?,
                horizontal_row_spacing: store.require(PADS, keys::HORIZONTAL_ROW_SPACING)?,
                vertical_row_spacing: store.require(PADS, keys::VERTICAL_ROW_SPACING)?,
            },
            body: Body {
                width: store.require(BODY, keys::BODY_WIDTH)?,
                length: store.require(BODY, keys::BODY_LENGTH)?,
                horizontal_offset: store.require(BODY, keys::HORIZONTAL_OFFSET)?,
                x_margin: store.require(BODY, keys::X_MARGIN)?,
                y_margin: store.require(BODY, keys::Y_MARGIN)?,
                clearance: store.require(BODY, keys::CLEARANCE)?,
                min_segment_length: store.require(BODY, keys::MIN_SEGMENT_LENGTH)?,
            },
        })
    }
}

/// Generates the SFM10 footprint.
///
/// Parameters are validated first; on failure nothing is generated. The same
/// parameters always produce the same pads and segments in the same order.
///
/// # Errors
///
/// Returns a [`ValidationError`] if [`validate`] rejects the parameters.
pub fn generate(params: &Sfm10Params) -> Result<Footprint, ValidationError> {
    validate(params)?;

    let pads = params.pads.compose().into_pads();
    let body = params.body.nominal_rect();
    let courtyard = params.body.courtyard_rect();
    let silkscreen = OutlineBuilder::new(params.body.clearance, params.body.min_segment_length)
        .build(&body, &pads);

    debug!(
        pads = pads.len(),
        segments = silkscreen.len(),
        "Generated {NAME} footprint"
    );

    Ok(Footprint {
        name: NAME.to_string(),
        value: NAME.to_string(),
        pads,
        body,
        courtyard,
        silkscreen,
    })
}

/// The SFM10 wizard as exposed to hosts.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sfm10Wizard;

impl FootprintWizard for Sfm10Wizard {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "SFM10 footprint wizard"
    }

    fn value(&self) -> &'static str {
        NAME
    }

    fn parameters(&self) -> ParameterStore {
        Sfm10Params::parameter_store()
    }

    fn check(&self, store: &ParameterStore) -> Result<(), WizardError> {
        let params = Sfm10Params::from_store(store)?;
        Ok(validate(&params)?)
    }

    fn build(&self, store: &ParameterStore) -> Result<Footprint, WizardError> {
        let params = Sfm10Params::from_store(store)?;
        Ok(generate(&params)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Side;
    use crate::wizard::params::ParamUnit;

    #[test]
    fn store_defaults_match_params() {
        let params = Sfm10Params::from_store(&Sfm10Params::parameter_store()).unwrap();
        assert_eq!(params, Sfm10Params::default());
    }

    #[test]
    fn store_declares_both_categories() {
        let store = Sfm10Params::parameter_store();
        let categories: Vec<&str> = store.categories().map(|(name, _)| name).collect();
        assert_eq!(categories, vec![keys::PADS, keys::BODY]);
        assert_eq!(store.len(), 15);
        assert_eq!(
            store.parameter(keys::PADS, keys::HORIZONTAL_COUNT).unwrap().unit,
            ParamUnit::Natural
        );
    }

    #[test]
    fn generate_defaults() {
        let footprint = generate(&Sfm10Params::default()).unwrap();
        assert_eq!(footprint.name, "SFM10");
        assert_eq!(footprint.pads.len(), 31);
        assert!((footprint.courtyard.width() - 15.2).abs() < 1e-9);
        assert!((footprint.courtyard.height() - 13.2).abs() < 1e-9);
    }

    #[test]
    fn left_side_stays_whole() {
        let footprint = generate(&Sfm10Params::default()).unwrap();
        let left: Vec<_> = footprint
            .silkscreen
            .iter()
            .filter(|s| s.side == Side::Left)
            .collect();
        assert_eq!(left.len(), 1);
        assert!((left[0].length() - 13.0).abs() < 1e-9);
    }

    #[test]
    fn odd_count_generates_nothing() {
        let mut params = Sfm10Params::default();
        params.pads.horizontal_count = 7;
        assert!(generate(&params).is_err());
    }

    #[test]
    fn wizard_builds_from_overridden_store() {
        let wizard = Sfm10Wizard;
        let mut store = wizard.parameters();
        store.set(keys::PADS, keys::VERTICAL_COUNT, 3.0).unwrap();
        store.set(keys::PADS, keys::HORIZONTAL_COUNT, 6.0).unwrap();
        let footprint = wizard.build(&store).unwrap();
        assert_eq!(footprint.pads.len(), 9);
    }

    #[test]
    fn wizard_check_rejects_odd_count() {
        let wizard = Sfm10Wizard;
        let mut store = wizard.parameters();
        assert!(wizard.check(&store).is_ok());
        store.set(keys::PADS, keys::HORIZONTAL_COUNT, 7.0).unwrap();
        assert!(matches!(
            wizard.check(&store),
            Err(WizardError::Validation(_))
        ));
    }

    #[test]
    fn wizard_reports_fractional_count() {
        let wizard = Sfm10Wizard;
        let mut store = wizard.parameters();
        store.set(keys::PADS, keys::VERTICAL_COUNT, 2.5).unwrap();
        let err = wizard.build(&store).unwrap_err();
        assert!(err.to_string().contains("Pads/vertical pads count"));
    }
}
