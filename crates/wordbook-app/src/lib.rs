pub mod command;
pub mod controller;
pub mod events;
pub mod io;
pub mod presenter;
pub mod settings;
pub mod shell;
pub mod state;
pub mod status;

pub use command::Command;
pub use controller::AppController;
pub use presenter::{ConsolePresenter, Presenter};
pub use shell::{Flow, Shell};
pub use state::AppState;
