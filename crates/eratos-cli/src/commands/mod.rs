pub mod animate;
pub mod factors;
pub mod run;
pub mod series;
