fn main() {
    std::process::exit(postal_unify_lib::run());
}
