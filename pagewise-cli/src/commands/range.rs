use anyhow::Result;
use clap::Args;
use pagewise::pagination::calculate_range;

#[derive(Args, Debug)]
pub struct RangeArgs {
    /// First value, or the last one when STOP is omitted (counting from 0)
    #[arg(allow_negative_numbers = true)]
    pub start: i64,

    /// Last value, inclusive
    #[arg(allow_negative_numbers = true)]
    pub stop: Option<i64>,

    /// Distance between values; 0 prints nothing
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub step: i64,

    /// Print the values as a JSON array
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: RangeArgs) -> Result<()> {
    let values = calculate_range(args.start, args.stop, args.step);

    if args.json {
        println!("{}", serde_json::to_string(&values)?);
    } else {
        let line: Vec<String> = values.iter().map(i64::to_string).collect();
        println!("{}", line.join(" "));
    }

    Ok(())
}
