fn main() {
    homecare_console_frontend::start();
}
