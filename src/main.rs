fn main() {
    shakenstir::start();
}
