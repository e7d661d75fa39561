mod pixelate;
mod threshold;
