mod catalog;
mod request;
mod response;
mod strict;
