use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// The six logical controls the trainer reads each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, strum::Display)]
pub enum Control {
    RollLeft,
    RollRight,
    PitchUp,
    PitchDown,
    SpeedUp,
    SpeedDown,
}

/// Held/released state of every [`Control`], sampled once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlSet {
    held: [bool; Control::COUNT],
}

impl ControlSet {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn set(&mut self, control: Control, held: bool) {
        self.held[control as usize] = held;
    }

    pub fn press(&mut self, control: Control) {
        self.set(control, true);
    }

    pub fn release(&mut self, control: Control) {
        self.set(control, false);
    }

    pub fn is_held(&self, control: Control) -> bool {
        self.held[control as usize]
    }

    pub fn is_empty(&self) -> bool {
        !self.held.iter().any(|&h| h)
    }

    pub fn held(&self) -> impl Iterator<Item = Control> + '_ {
        Control::iter().filter(|&c| self.is_held(c))
    }

    pub fn with(mut self, control: Control) -> Self {
        self.press(control);
        self
    }
}

impl FromIterator<Control> for ControlSet {
    fn from_iter<I: IntoIterator<Item = Control>>(iter: I) -> Self {
        let mut set = Self::none();
        for c in iter {
            set.press(c);
        }
        set
    }
}
