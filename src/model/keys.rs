use crate::model::days::clamp_index;
use crate::model::layout::LayoutInput;

/// Discrete key triggers the key source supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineKey {
    /// ArrowLeft: step toward older days.
    Older,
    /// ArrowRight: step toward newer days.
    Newer,
    /// Escape: leave timeline mode immediately, no grace delay.
    Exit,
}

/// Effects of one key press. Unlike drags, arrow keys commit instantly and
/// carry no drag offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyEffects {
    pub commit: Option<usize>,
    pub exit: bool,
    pub layout: Option<LayoutInput>,
}

pub fn update(key: TimelineKey, index: usize, len: usize) -> KeyEffects {
    match key {
        TimelineKey::Exit => KeyEffects { commit: None, exit: true, layout: None },
        TimelineKey::Older | TimelineKey::Newer => {
            // Defensive guard; always true once the sequence is built.
            if index >= len {
                return KeyEffects { commit: None, exit: false, layout: None };
            }
            let step: i64 = if key == TimelineKey::Older { 1 } else { -1 };
            let candidate = clamp_index(index as i64 + step, len);
            KeyEffects {
                commit: Some(candidate),
                exit: false,
                layout: Some(LayoutInput::resting(candidate)),
            }
        }
    }
}
