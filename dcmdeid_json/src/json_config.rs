/// Config options used when converting a data set to DICOM JSON.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DicomJsonConfig {
  /// Whether to format the DICOM JSON for readability with newlines and
  /// indentation.
  ///
  pub pretty_print: bool,
}

impl DicomJsonConfig {
  /// Sets whether to pretty print the output.
  ///
  pub fn pretty_print(mut self, pretty_print: bool) -> Self {
    self.pretty_print = pretty_print;
    self
  }
}
