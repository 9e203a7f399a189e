pub mod configuration;
pub mod error;

pub mod driver {
    pub mod prompt;
    pub mod batch;
    pub mod interactive;
}

pub mod math {
    pub mod function {
        pub mod domainerror;
        pub mod mathfunction;
        pub mod trigfunction;
    }
}

pub mod report {
    pub mod format;
    pub mod outputfile;
    pub mod reportwriter;
}

pub mod scan {
    pub mod sample;
    pub mod scanconfig;
}
