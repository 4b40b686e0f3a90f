mod common;
mod filtering;
mod routing;
