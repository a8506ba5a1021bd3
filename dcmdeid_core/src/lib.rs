//! Core DICOM data model used by the dcmdeid de-identification engine: data
//! element tags, value representations, data element values, data sets, and
//! the data element dictionary.

pub mod data_element_tag;
pub mod data_element_value;
pub mod data_error;
pub mod data_set;
pub mod data_set_path;
pub mod dictionary;
pub mod error;
pub mod value_representation;

pub use data_element_tag::DataElementTag;
pub use data_element_value::{DataElementValue, unique_identifier};
pub use data_error::DataError;
pub use data_set::DataSet;
pub use data_set_path::DataSetPath;
pub use error::{DcmdeidError, print_error_lines};
pub use value_representation::ValueRepresentation;
