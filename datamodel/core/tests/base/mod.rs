mod names;
mod parsing;
mod warnings;
