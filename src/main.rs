fn main() {
    minimax_chess::uci::run_uci_loop();
}
