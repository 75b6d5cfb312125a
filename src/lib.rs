pub mod shared {
    pub mod core {
        pub mod errors;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod http_error;
        pub mod record_store;
    }
}

pub mod modules {
    pub mod essays {
        pub mod core {
            pub mod essay;
            pub mod analytics {
                pub mod averages;
                pub mod chart;
                pub mod goal;
                pub mod ranking;
                pub mod trend;
                pub mod window;
            }
        }
        pub mod use_cases {
            pub mod register_essay {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_essays {
                pub mod queries;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod dashboard_insights {
                pub mod projection;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod seed;
            }
        }
    }

    pub mod appointments {
        pub mod core {
            pub mod appointment;
            pub mod availability;
        }
        pub mod use_cases {
            pub mod book_appointment {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_appointments {
                pub mod queries;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod slot_board {
                pub mod projection;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod seed;
            }
        }
    }

    pub mod library {
        pub mod core {
            pub mod material;
            pub mod weekly_theme;
        }
        pub mod use_cases {
            pub mod publish_material {
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod weekly_themes {
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod seed;
            }
        }
    }

    pub mod tutor {
        pub mod core {
            pub mod script;
        }
        pub mod use_cases {
            pub mod chat {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }

    pub mod auth {
        pub mod core {
            pub mod session;
        }
        pub mod use_cases {
            pub mod session {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod session_gate;
            }
        }
    }
}

pub mod shell;
