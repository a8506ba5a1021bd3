pub mod anonymize_command;
pub mod print_command;
