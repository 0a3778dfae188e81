pub mod application {
    pub mod catalog {
        pub mod search;
    }
    pub mod classifier {
        pub mod gateway;
    }
    pub mod media {
        pub mod acquisition;
    }
    pub mod session {
        pub mod camera_search;
    }
}

pub mod domain {
    pub mod logger;
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod search;
        }
    }
    pub mod classifier {
        pub mod errors;
        pub mod model;
        pub mod services;
    }
    pub mod labels {
        pub mod model;
        pub mod normalizer;
        pub mod table;
    }
    pub mod media {
        pub mod errors;
        pub mod model;
        pub mod services;
    }
    pub mod session {
        pub mod errors;
        pub mod model;
    }
}

#[cfg(test)]
pub(crate) mod test_support;
