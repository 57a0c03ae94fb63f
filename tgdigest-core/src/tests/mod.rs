mod parser;
mod report;
mod support;
