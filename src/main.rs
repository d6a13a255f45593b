fn main() {
    studioport::run();
}
