use anyhow::Result;

fn main() -> Result<()> {
    punc_swap_lib::run()
}
