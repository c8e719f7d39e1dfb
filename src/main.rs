// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Hello world example

use hello_world::config::Options;

fn main() -> hello_world::Result<()> {
    env_logger::init();

    let options = Options::from_env();
    hello_world::hello::app().run(&options)
}
