//! # TUI Components
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status bar
//!
//! ### Stateful Components (Event-Driven)
//!
//! Persistent state lives in `TuiState`; a transient view borrows it each frame:
//! - `SearchBoxState` / `SearchBox`: movie search input and suggestions
//! - `FriendListState` / `FriendList`: friends with balances
//! - `AddFriendFormState` / `AddFriendFormView`: new friend form
//! - `SplitBillFormState` / `SplitBillFormView`: bill split form
//!
//! Components receive core data as props and emit high-level events through
//! `EventHandler`. They never mutate `App` directly; the event loop turns
//! their events into `Action`s.
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── title_bar.rs
//! ├── search_box.rs
//! ├── friend_list.rs
//! ├── add_friend_form.rs
//! └── split_bill_form.rs
//! ```

pub mod add_friend_form;
pub mod friend_list;
pub mod search_box;
pub mod split_bill_form;
mod title_bar;

pub use add_friend_form::{AddFriendEvent, AddFriendFormState, AddFriendFormView};
pub use friend_list::{FriendList, FriendListEvent, FriendListState};
pub use search_box::{SearchBox, SearchBoxEvent, SearchBoxState};
pub use split_bill_form::{SplitBillEvent, SplitBillFormState, SplitBillFormView};
pub use title_bar::TitleBar;
