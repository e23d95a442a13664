use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the frame driver.
///
/// `on_frame` is called once per presented frame, after the runtime has
/// accumulated this frame's input and ticked the clock. Input callbacks never
/// run concurrently with it; everything happens on the window's thread.
pub trait App {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
