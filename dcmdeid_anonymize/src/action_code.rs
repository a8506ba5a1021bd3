//! Action codes for de-identification as defined by DICOM PS3.15 Annex E,
//! e.g. `X`, `Z`, `D`, and compound codes such as `X/Z/D`.

/// A single de-identification action that can be applied to a data element.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
  /// `X`: remove the data element.
  Remove,

  /// `Z`: replace with a zero length value, or a non-zero length dummy value
  /// consistent with the VR.
  ZeroOrDummy,

  /// `D`: replace with a non-zero length dummy value consistent with the VR.
  Dummy,

  /// `K`: keep the data element. Sequences are de-identified recursively.
  Keep,

  /// `C`: clean, i.e. replace identifying text with values of similar meaning.
  Clean,

  /// `U`: replace the UID with a new UID that is consistent across the
  /// session.
  ReplaceUid,
}

impl Action {
  /// Parses a single action code. `U*` is accepted as a synonym for `U`.
  ///
  pub fn from_code(code: &str) -> Result<Self, ()> {
    match code {
      "X" => Ok(Self::Remove),
      "Z" => Ok(Self::ZeroOrDummy),
      "D" => Ok(Self::Dummy),
      "K" => Ok(Self::Keep),
      "C" => Ok(Self::Clean),
      "U" | "U*" => Ok(Self::ReplaceUid),
      _ => Err(()),
    }
  }

  pub fn to_code(&self) -> &'static str {
    match self {
      Self::Remove => "X",
      Self::ZeroOrDummy => "Z",
      Self::Dummy => "D",
      Self::Keep => "K",
      Self::Clean => "C",
      Self::ReplaceUid => "U",
    }
  }
}

impl core::fmt::Display for Action {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    f.write_str(self.to_code())
  }
}

/// An action code as it appears in a rule table: either a single action, or a
/// compound code listing alternatives, e.g. `X/Z/D`.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionCode {
  Simple(Action),
  Conditional(ConditionalActions),
}

/// The alternatives of a compound action code. Always holds two or three
/// distinct actions, at least one of which is [`Action::Remove`] or
/// [`Action::ZeroOrDummy`].
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConditionalActions(Vec<Action>);

impl ConditionalActions {
  pub fn actions(&self) -> &[Action] {
    &self.0
  }
}

/// Occurs when an action code string can't be parsed.
///
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("Invalid action code '{code}': {details}")]
pub struct ActionCodeError {
  pub code: String,
  pub details: String,
}

impl ActionCode {
  /// Parses an action code string such as `"D"` or `"X/Z/U*"`.
  ///
  pub fn parse(code: &str) -> Result<Self, ActionCodeError> {
    let error = |details: &str| ActionCodeError {
      code: code.to_string(),
      details: details.to_string(),
    };

    let parts: Vec<&str> = code.trim().split('/').collect();

    let mut actions = Vec::with_capacity(parts.len());
    for part in parts {
      let action = Action::from_code(part.trim())
        .map_err(|_| error(&format!("'{part}' is not a known action")))?;

      if actions.contains(&action) {
        return Err(error("Actions must not be repeated"));
      }

      actions.push(action);
    }

    match actions.as_slice() {
      [action] => Ok(Self::Simple(*action)),

      _ if actions.len() > 3 => {
        Err(error("Compound codes have at most three actions"))
      }

      _ if !actions.contains(&Action::Remove)
        && !actions.contains(&Action::ZeroOrDummy) =>
      {
        Err(error("Compound codes must include X or Z"))
      }

      _ => Ok(Self::Conditional(ConditionalActions(actions))),
    }
  }

  /// Returns the single action to apply. Compound codes resolve to the most
  /// conservative alternative: `X` if present, otherwise `Z`.
  ///
  pub fn resolve(&self) -> Action {
    match self {
      Self::Simple(action) => *action,
      Self::Conditional(actions) => {
        if actions.0.contains(&Action::Remove) {
          Action::Remove
        } else {
          Action::ZeroOrDummy
        }
      }
    }
  }
}

impl core::fmt::Display for ActionCode {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    match self {
      Self::Simple(action) => action.fmt(f),
      Self::Conditional(actions) => {
        let codes: Vec<&str> =
          actions.0.iter().map(|action| action.to_code()).collect();
        f.write_str(&codes.join("/"))
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_simple_test() {
    assert_eq!(ActionCode::parse("X"), Ok(ActionCode::Simple(Action::Remove)));
    assert_eq!(
      ActionCode::parse("U*"),
      Ok(ActionCode::Simple(Action::ReplaceUid))
    );
    assert_eq!(ActionCode::parse("K").unwrap().to_string(), "K");
  }

  #[test]
  fn parse_compound_test() {
    let code = ActionCode::parse("X/Z/D").unwrap();
    assert_eq!(code.resolve(), Action::Remove);
    assert_eq!(code.to_string(), "X/Z/D");

    assert_eq!(ActionCode::parse("Z/D").unwrap().resolve(), Action::ZeroOrDummy);
    assert_eq!(ActionCode::parse("X/D").unwrap().resolve(), Action::Remove);
    assert_eq!(
      ActionCode::parse("X/Z/U*").unwrap().resolve(),
      Action::Remove
    );
  }

  #[test]
  fn parse_invalid_test() {
    assert!(ActionCode::parse("").is_err());
    assert!(ActionCode::parse("Q").is_err());
    assert!(ActionCode::parse("X/X").is_err());
    assert!(ActionCode::parse("D/K").is_err());
    assert!(ActionCode::parse("X/Z/D/K").is_err());

    assert_eq!(
      ActionCode::parse("X/Q").unwrap_err().to_string(),
      "Invalid action code 'X/Q': 'Q' is not a known action"
    );
  }
}
