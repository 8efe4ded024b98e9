// Keyboard mapping for the viewer, mirroring the web control panel:
// shape picker, density slider, theme switcher, symbol inputs and the
// custom color pickers.

use glyphcloud_core::constants::{DENSITY_STEP, MAX_SYMBOL_CHARS, SYMBOL_GROUPS};
use glyphcloud_core::{ConfigError, Rgb, SceneConfig, ShapeKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    SelectShape(ShapeKind),
    NextShape,
    PrevShape,
    MoreParticles,
    FewerParticles,
    NextTheme,
    Rescatter,
    Edit(EditTarget),
    SetSymbol { slot: usize, symbol: String },
    /// Slot 0 is the backdrop, slots 1..=4 the group colors.
    SetCustomColor { slot: usize, color: Rgb },
    Quit,
}

/// Map a character key to an action. Named keys (Tab, Escape) are handled by
/// the event loop.
#[inline]
pub fn action_for_key(key: &str) -> Option<Action> {
    match key {
        "1" | "2" | "3" | "4" | "5" | "6" | "7" => key
            .parse::<usize>()
            .ok()
            .and_then(|d| ShapeKind::from_index(d - 1))
            .map(Action::SelectShape),
        "+" | "=" => Some(Action::MoreParticles),
        "-" | "_" => Some(Action::FewerParticles),
        "t" | "T" => Some(Action::NextTheme),
        "r" | "R" => Some(Action::Rescatter),
        "e" | "E" => Some(Action::Edit(EditTarget::Symbols)),
        "c" | "C" => Some(Action::Edit(EditTarget::CustomColors)),
        "q" | "Q" => Some(Action::Quit),
        _ => None,
    }
}

/// Configuration after `action`, or `None` when the action is not a
/// configuration change.
pub fn next_config(config: &SceneConfig, action: Action) -> Option<SceneConfig> {
    let mut next = config.clone();
    match action {
        Action::SelectShape(shape) => Some(next.with_shape(Some(shape))),
        Action::NextShape => {
            let shape = config.shape.map_or(ShapeKind::ALL[0], ShapeKind::next);
            Some(next.with_shape(Some(shape)))
        }
        Action::PrevShape => {
            let shape = config.shape.map_or(ShapeKind::ALL[0], ShapeKind::prev);
            Some(next.with_shape(Some(shape)))
        }
        Action::MoreParticles => Some(next.with_density(config.density.saturating_add(DENSITY_STEP))),
        Action::FewerParticles => Some(next.with_density(config.density.saturating_sub(DENSITY_STEP))),
        Action::NextTheme => {
            let palette = config.next_palette();
            Some(next.with_palette(palette))
        }
        Action::SetSymbol { slot, symbol } => {
            next.set_symbol(slot, &symbol);
            Some(next)
        }
        Action::SetCustomColor { slot, color } => {
            let mut custom = config.custom.clone();
            match slot {
                0 => custom.background = color,
                n => custom.set_color(n - 1, color),
            }
            Some(next.with_custom_palette(custom))
        }
        Action::Edit(_) | Action::Rescatter | Action::Quit => None,
    }
}

pub fn window_title(config: &SceneConfig, fps: u32) -> String {
    let shape = config.shape.map_or("Scatter", ShapeKind::label);
    format!(
        "glyphcloud | {} | {} particles | {} | {} | {} fps",
        shape,
        config.total(),
        config.palette.label(),
        config.symbols.join(" "),
        fps
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditTarget {
    Symbols,
    /// Backdrop first, then one color per group.
    CustomColors,
}

impl EditTarget {
    pub fn slots(self) -> usize {
        match self {
            EditTarget::Symbols => SYMBOL_GROUPS,
            EditTarget::CustomColors => SYMBOL_GROUPS + 1,
        }
    }

    fn max_chars(self) -> usize {
        match self {
            EditTarget::Symbols => MAX_SYMBOL_CHARS,
            // "#rrggbb"
            EditTarget::CustomColors => 7,
        }
    }

    fn slot_label(self, slot: usize) -> String {
        match (self, slot) {
            (EditTarget::Symbols, n) => format!("symbol {}", n + 1),
            (EditTarget::CustomColors, 0) => "background".to_string(),
            (EditTarget::CustomColors, n) => format!("color {n}"),
        }
    }
}

/// Line editor walking through the symbol or custom color slots in order.
///
/// Typed text fills the current slot; `commit` turns it into an action and
/// moves on. An empty commit keeps the slot's old value. The editor closes
/// after the last slot.
#[derive(Clone, Debug, Default)]
pub struct SlotEditor {
    target: Option<EditTarget>,
    slot: usize,
    buffer: String,
}

impl SlotEditor {
    pub fn begin(&mut self, target: EditTarget) {
        self.target = Some(target);
        self.slot = 0;
        self.buffer.clear();
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<EditTarget> {
        self.target
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Append printable characters up to the slot's length limit.
    pub fn type_text(&mut self, text: &str) {
        let Some(target) = self.target else {
            return;
        };
        for c in text.chars().filter(|c| !c.is_control()) {
            if self.buffer.chars().count() >= target.max_chars() {
                break;
            }
            self.buffer.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    pub fn cancel(&mut self) {
        self.target = None;
        self.buffer.clear();
    }

    /// Finish the current slot. A color that does not parse is rejected and
    /// the slot stays open with an empty buffer.
    pub fn commit(&mut self) -> Result<Option<Action>, ConfigError> {
        let Some(target) = self.target else {
            return Ok(None);
        };
        let text = std::mem::take(&mut self.buffer);
        let action = if text.is_empty() {
            None
        } else {
            match target {
                EditTarget::Symbols => Some(Action::SetSymbol {
                    slot: self.slot,
                    symbol: text,
                }),
                EditTarget::CustomColors => Some(Action::SetCustomColor {
                    slot: self.slot,
                    color: Rgb::from_hex(&text)?,
                }),
            }
        };
        self.slot += 1;
        if self.slot >= target.slots() {
            self.target = None;
        }
        Ok(action)
    }

    /// Title suffix describing the open slot, if any.
    pub fn status(&self) -> Option<String> {
        let target = self.target?;
        Some(format!(
            "editing {}: {}_ (Enter next, Esc done)",
            target.slot_label(self.slot),
            self.buffer
        ))
    }
}
