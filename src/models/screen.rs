/// Which screen the render surface should show.
///
/// Derived from engine state every frame, never stored: unloaded means
/// `Loading`, completed means `Result`, anything else is the quiz itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Quiz,
    Result,
}
