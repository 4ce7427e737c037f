// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod accounts_table_datasource;
        pub(crate) mod csv_table;
        pub(crate) mod currencies_table_datasource;
        pub(crate) mod ledger_table_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod amount_model;
        pub(crate) mod currency_model;
        pub(crate) mod iso_date_model;
        pub(crate) mod ledger_kind_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod report_inputs_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod account;
        pub(crate) mod account_tree;
        pub(crate) mod entry;
        pub(crate) mod period;
        pub(crate) mod raw_entry;
        pub(crate) mod report;
        pub(crate) mod totals;
    }
    pub(crate) mod logic {
        pub(crate) mod aggregator;
        pub(crate) mod normalizer;
        mod utils;
        pub(crate) use utils::month_periods;
    }
    pub(crate) mod repositories {
        pub(crate) mod report_inputs_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod report_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod statement_fmt;
    pub(crate) mod table_printer;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::account::*;
        pub use crate::domain::entities::account_tree::*;
        pub use crate::domain::entities::entry::*;
        pub use crate::domain::entities::period::*;
        pub use crate::domain::entities::raw_entry::*;
        pub use crate::domain::entities::report::*;
        pub use crate::domain::entities::totals::*;
    }
}
