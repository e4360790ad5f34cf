//! Scripted drag replay.

use rangebrush_core::{
    ConfigError, EventScript, LabelFormat, PointerEvent, RangeSelector, SelectorConfig, Selection,
};
use rangebrush_render::{RenderContext, RenderError, SvgSurface};
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use thiserror::Error;

/// Demo errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Drag used when no script is given: grab the left edge and pull it to 5,
/// then try to move the whole selection past the right end of the domain.
pub fn default_script() -> EventScript {
    EventScript::from(vec![
        PointerEvent::Down { position: 10.0 },
        PointerEvent::Move { position: 50.0 },
        PointerEvent::Up,
        PointerEvent::Down { position: 250.0 },
        PointerEvent::Move { position: 300.0 },
        PointerEvent::Up,
    ])
}

/// Build a selector from the config, replay the script and render the result.
pub fn replay(config: &SelectorConfig, script: &EventScript) -> Result<(Vec<Selection>, String), AppError> {
    let changes: Rc<RefCell<Vec<Selection>>> = Rc::default();
    let sink = Rc::clone(&changes);
    let label = config.label.clone();

    let mut selector = RangeSelector::from_config(config, SvgSurface::new(), move |selection| {
        log::info!(
            "Selection changed to [{}, {}] ({})",
            selection.low,
            selection.high,
            label.format(selection.low)
        );
        sink.borrow_mut().push(selection);
    })?;

    script.replay(&mut selector);

    let selection = selector.selection();
    let ctx = RenderContext::new(selector.scale()).with_label(config.label.format(selection.low));
    let svg = selector.surface().render(&ctx)?;
    log::info!(
        "Replayed {} events, {} changes, final selection [{}, {}]",
        script.len(),
        changes.borrow().len(),
        selection.low,
        selection.high
    );

    let changes = changes.borrow().clone();
    Ok((changes, svg))
}

/// Load the optional config and script files and replay.
pub fn run(config_path: Option<&str>, script_path: Option<&str>) -> Result<String, AppError> {
    let config = match config_path {
        Some(path) => SelectorConfig::load(Path::new(path))?,
        None => SelectorConfig {
            label: LabelFormat::with_suffix(" Leads"),
            ..SelectorConfig::default()
        },
    };
    let script = match script_path {
        Some(path) => EventScript::load(Path::new(path))?,
        None => default_script(),
    };

    let (_, svg) = replay(&config, &script)?;
    Ok(svg)
}
