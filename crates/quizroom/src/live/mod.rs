//! Live quiz waiting room.
//!
//! When an online quiz is scheduled, students gather in a waiting room
//! served over a websocket. The host subscribes here to watch the roster
//! fill up and to observe the quiz starting. This is a thin pub/sub
//! listener: events arrive as JSON text frames, in whatever order the
//! server emits them, with no replay or recovery on disconnect.

mod events;
mod stream;

pub use events::WaitingRoomEvent;
pub use stream::WaitingRoomStream;
