mod blob;
mod dotted;
mod scratch;
