//! Parameter checks run before any geometry is computed.

use crate::error::ValidationError;
use crate::wizard::sfm10::{keys, Sfm10Params};

/// Largest total number of pads a footprint may carry.
///
/// Designators are `u32` and every pad is allocated up front, so the total is
/// bounded well below `u32::MAX`.
pub const MAX_PAD_COUNT: u32 = 10_000;

/// Checks resolved parameters.
///
/// The horizontal pad count is split evenly between the top and bottom rows,
/// so it must be even. The two counts together may not exceed
/// [`MAX_PAD_COUNT`]. Lengths, pitches, spacings, margins and clearances must
/// be finite and not negative; zero is accepted. The body offset may be any
/// finite value.
///
/// # Errors
///
/// Returns a [`ValidationError`] naming the first offending parameter.
pub fn validate(params: &Sfm10Params) -> Result<(), ValidationError> {
    if params.pads.horizontal_count % 2 != 0 {
        return Err(ValidationError::new(
            keys::PADS,
            keys::HORIZONTAL_COUNT,
            format!(
                "must be a multiple of 2, got {}",
                params.pads.horizontal_count
            ),
        ));
    }

    let pads = &params.pads;
    let body = &params.body;

    if pads.horizontal_count > MAX_PAD_COUNT {
        return Err(ValidationError::new(
            keys::PADS,
            keys::HORIZONTAL_COUNT,
            format!(
                "must not exceed {MAX_PAD_COUNT}, got {}",
                pads.horizontal_count
            ),
        ));
    }
    let total = u64::from(pads.horizontal_count) + u64::from(pads.vertical_count);
    if total > u64::from(MAX_PAD_COUNT) {
        return Err(ValidationError::new(
            keys::PADS,
            keys::VERTICAL_COUNT,
            format!("total pad count {total} exceeds the maximum of {MAX_PAD_COUNT}"),
        ));
    }

    let dimensions = [
        (keys::PADS, keys::PAD_WIDTH, pads.pad_width),
        (keys::PADS, keys::PAD_LENGTH, pads.pad_length),
        (keys::PADS, keys::PAD_PITCH, pads.pitch),
        (keys::PADS, keys::HANDSOLDER_MARGIN, pads.handsolder_margin),
        (keys::PADS, keys::HORIZONTAL_ROW_SPACING, pads.horizontal_row_spacing),
        (keys::PADS, keys::VERTICAL_ROW_SPACING, pads.vertical_row_spacing),
        (keys::BODY, keys::BODY_WIDTH, body.width),
        (keys::BODY, keys::BODY_LENGTH, body.length),
        (keys::BODY, keys::X_MARGIN, body.x_margin),
        (keys::BODY, keys::Y_MARGIN, body.y_margin),
        (keys::BODY, keys::CLEARANCE, body.clearance),
        (keys::BODY, keys::MIN_SEGMENT_LENGTH, body.min_segment_length),
    ];

    for (category, name, value) in dimensions {
        if !value.is_finite() {
            return Err(ValidationError::new(category, name, "must be a finite number"));
        }
        if value < 0.0 {
            return Err(ValidationError::new(
                category,
                name,
                format!("must not be negative, got {value}"),
            ));
        }
    }

    if !body.horizontal_offset.is_finite() {
        return Err(ValidationError::new(
            keys::BODY,
            keys::HORIZONTAL_OFFSET,
            "must be a finite number",
        ));
    }

    Ok(())
}
