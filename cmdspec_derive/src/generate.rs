mod enumeration;
mod field;
mod options;
