/// Maps an escape-time iteration count to a packed ARGB colour.
///
/// Called once per pixel per frame from many threads, so implementations must
/// be pure and cheap.
pub trait ColourMap: Send + Sync {
    fn colour(&self, iteration: u32, max_iteration: u32) -> u32;

    fn display_name(&self) -> &str;
}
