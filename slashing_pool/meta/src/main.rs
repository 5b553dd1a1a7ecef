fn main() {
    multiversx_sc_meta_lib::cli_main::<slashing_pool::AbiProvider>();
}
