use bevy_ecs::prelude::Component;

/// Whether the host should render the entity. Presentables start hidden.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Visibility {
    pub visible: bool,
}

impl Visibility {
    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}
