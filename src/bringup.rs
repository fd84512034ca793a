//! Panel bring-up sequence.
//!
//! [`bring_up`] runs the whole start-up in one call and leaves `screen` on
//! the glass; [`show`] replaces the content of an already running panel.

use crate::config::PanelConfig;
use crate::error::OledError;
use crate::layout::{render_screen, Screen};
use crate::panel::Panel;
use crate::viewport::Viewport;

/// Initialise `panel` according to `config` and display `screen`.
///
/// # Control flow
///
/// 1. Validate `config` (no I2C traffic if it is rejected).
/// 2. Send the controller init sequence.
/// 3. Flip the image if `config.flipped`.
/// 4. Clear the frame buffer.
/// 5. Program `config.contrast`, if any.
/// 6. Render `screen` into the visible window. On a flipped panel this is
///    the mirrored window ([`PanelConfig::ram_viewport`]).
/// 7. Flush the frame buffer to hardware.
///
/// # Errors
///
/// The first failing step's error is returned and the remaining steps are
/// skipped. Rendering failures surface as [`OledError::Render`].
pub async fn bring_up<P>(
    panel: &mut P,
    config: &PanelConfig,
    screen: &Screen<'_>,
) -> Result<(), OledError>
where
    P: Panel,
{
    config.validate()?;

    panel.init().await?;

    #[cfg(feature = "defmt")]
    defmt::info!(
        "Panel initialised at {=u8:#x}, viewport {}x{} @ ({}, {})",
        config.address,
        config.viewport.width,
        config.viewport.height,
        config.viewport.offset_x,
        config.viewport.offset_y
    );

    if config.flipped {
        panel.set_flipped(true).await?;
    }

    panel.clear_buffer();

    if let Some(contrast) = config.contrast {
        panel.set_contrast(contrast).await?;
    }

    render(panel, config, screen)?;
    panel.flush().await?;

    #[cfg(feature = "defmt")]
    defmt::info!("Bring-up complete");

    Ok(())
}

/// Replace whatever is on an initialised panel with `screen`.
///
/// # Errors
///
/// [`OledError::NotInitialized`] if the panel has not been brought up,
/// [`OledError::Render`] on a drawing failure, or the flush error.
pub async fn show<P>(panel: &mut P, config: &PanelConfig, screen: &Screen<'_>) -> Result<(), OledError>
where
    P: Panel,
{
    if !panel.is_initialized() {
        return Err(OledError::NotInitialized);
    }
    panel.clear_buffer();
    render(panel, config, screen)?;
    panel.flush().await
}

fn render<P>(panel: &mut P, config: &PanelConfig, screen: &Screen<'_>) -> Result<(), OledError>
where
    P: Panel,
{
    let window = config.ram_viewport();
    let target = panel.target_mut().ok_or(OledError::NotInitialized)?;
    let mut viewport = Viewport::new(target, &window);
    render_screen(&mut viewport, screen).map_err(|_| {
        #[cfg(feature = "defmt")]
        defmt::error!("Render failed");
        OledError::Render
    })
}
