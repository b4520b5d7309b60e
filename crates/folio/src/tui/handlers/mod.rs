pub(super) mod mouse;
pub(super) mod navigation;
