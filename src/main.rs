fn main() {
    oral_health_lib::run()
}
