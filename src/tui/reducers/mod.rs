pub mod boxscore;
pub mod data_loading;
pub mod navigation;

pub use boxscore::reduce_boxscore;
pub use data_loading::reduce_data_loading;
pub use navigation::reduce_navigation;
