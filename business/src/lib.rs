pub mod application {
    pub mod recommendation {
        pub mod submit;
    }
}

pub mod domain {
    pub mod logger;
    pub mod recommendation {
        pub mod errors;
        pub mod input;
        pub mod model;
        pub mod services;
        pub mod state;
        pub mod store;
        pub mod view;
        pub mod use_cases {
            pub mod submit;
        }
    }
}
