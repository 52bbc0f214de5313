use crate::core::config::data::{path_display, Config};

impl Config {
    pub fn print_all(&self) {
        println!("Current configuration:");
        println!("  file: {}", path_display(Self::get_config_path()));
        match self.reply_delay_ms {
            Some(millis) => println!("  reply-delay-ms: {millis}"),
            None => println!("  reply-delay-ms: (unset, {} ms)", self.reply_delay().as_millis()),
        }
        match &self.title {
            Some(title) => println!("  title: {title}"),
            None => println!("  title: (unset)"),
        }
        match &self.subtitle {
            Some(subtitle) => println!("  subtitle: {subtitle}"),
            None => println!("  subtitle: (unset)"),
        }
        match &self.greeting {
            Some(greeting) => println!("  greeting: {greeting}"),
            None => println!("  greeting: (unset)"),
        }
    }
}
