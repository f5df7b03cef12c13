pub mod predistribuce;
