pub mod constants;
pub mod decomposer;
pub mod format;
pub mod insight;
pub mod parser;
pub mod report;

pub mod math {
    pub mod basic;
    pub mod decompositions {
        pub mod tait_bryan;
    }
}

pub mod primitives {
    pub mod euler;
    pub mod matrix;
    pub mod translation;
}
