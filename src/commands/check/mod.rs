mod output;
mod run;

pub use run::run;
