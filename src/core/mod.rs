pub mod bootstrap;
pub mod clock;
pub mod draw_list;
pub mod frame;
pub mod gpu_context;
pub mod input_adapter;
pub mod layout;
pub mod lifecycle;
pub mod quad_renderer;

pub use bootstrap::{initialize, shutdown, BootstrapError, WindowHandle};
pub use clock::{FixedClock, FrameClock, SystemClock, TimeSource};
pub use draw_list::{DrawList, Vertex, Viewport};
pub use frame::{draw_frame, render_frame};
pub use layout::{background_color, Cell, Grid};
pub use lifecycle::{EventQueue, InputEvent, Key, KeyAction, Lifecycle, LoopState, EXIT_KEY};
