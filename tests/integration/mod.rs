mod test_combine;
mod test_promote;
mod test_library;
